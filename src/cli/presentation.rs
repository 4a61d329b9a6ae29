//! CLI presentation: renders domain results through the output sink.

mod app;

pub use app::{
    display_application_summary, display_merged_application_summary, display_summary_view,
    NO_RUNNING_INSTANCES,
};
