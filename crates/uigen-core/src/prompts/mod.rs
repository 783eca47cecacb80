mod generation;


/// Every generated project exports its root component from this file.
pub const ENTRYPOINT_PATH: &str = "/App.jsx";
/// Import alias for non-library files in the virtual file system.
pub const IMPORT_ALIAS: &str = "@/";

pub use generation::generation_prompt;
