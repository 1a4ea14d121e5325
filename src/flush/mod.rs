mod jsonl;

pub use jsonl::{REPORTS_FILE, flush_reports_to_jsonl, read_reports_jsonl};
