use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_render_args_parse() {
    let cli = Cli::try_parse_from([
        "jl", "-v", "render", "-t", "t.j2", "-i", "in.json", "--mode", "entity",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(args.template, PathBuf::from("t.j2"));
    assert_eq!(args.mode, ModeArg::Entity);
    assert_eq!(RenderMode::from(args.mode), RenderMode::Entity);
    assert!(!args.pretty);
}

#[test]
fn test_serve_port_must_be_numeric() {
    assert!(Cli::try_parse_from(["jl", "serve", "--port", "http"]).is_err());
    let cli = Cli::try_parse_from(["jl", "serve", "--port", "8080", "-c", "x.yml"]).unwrap();
    assert_eq!(cli.global.config, Some(PathBuf::from("x.yml")));
    let Commands::Serve(args) = cli.command else {
        panic!("expected serve command");
    };
    assert_eq!(args.port, Some(8080));
}
