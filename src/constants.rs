/// Default job file, relative to the working root.
pub const CONFIG_PATH: &str = "ops/commands.yml";
/// Glob used by a job that names neither `files` nor `glob`.
pub const DEFAULT_GLOB: &str = "**/*.html";
/// The only job type that does anything.
pub const REPLACE_TEXT: &str = "replace_text";
/// Path prefixes that are never rewritten: CI workflows, the job
/// configuration and the automation scripts.
pub const RESERVED_PREFIXES: [&str; 3] = [".github/", "ops/", "scripts/"];
