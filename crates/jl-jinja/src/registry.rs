//! Registration of the custom filters.
//!
//! The name list and the registration function are generated from one table
//! so they cannot disagree.

use minijinja::Environment;

use crate::filters;

macro_rules! filter_table {
    ($($name:literal => $func:path),+ $(,)?) => {
        /// Names of every custom filter, in registration order
        pub const FILTER_NAMES: &[&str] = &[$($name),+];

        /// Install every custom filter into `env`
        pub fn register_filters(env: &mut Environment<'_>) {
            $(env.add_filter($name, $func);)+
            log::debug!("Registered {} custom filters", FILTER_NAMES.len());
        }
    };
}

filter_table! {
    "map_priority" => filters::map_priority,
    "timectime" => filters::timectime,
    "ternary" => filters::ternary,
    "comment" => filters::comment,
    "json2tbl" => filters::json2tbl,
    "to_json" => filters::to_json,
    "to_nice_json" => filters::to_nice_json,
    "is_in_list" => filters::is_in_list,
    "regex_match" => filters::regex_match,
    "regex_replace" => filters::regex_replace,
    "regex_search" => filters::regex_search,
    "regex_substring" => filters::regex_substring,
    "filter_datetime" => filters::filter_datetime,
    "filter_json" => filters::filter_json,
}
