use super::helpers::file_name;
use uigen_tools::tools::{FileManagerCommand, FileManagerParams};

pub fn message(params: &FileManagerParams) -> String {
    let file = file_name(params.path.as_deref());

    match &params.command {
        Some(FileManagerCommand::Rename) => {
            match params.new_path.as_deref().filter(|p| !p.is_empty()) {
                Some(new_path) => format!("Renaming {file} to {}", file_name(Some(new_path))),
                None => format!("Renaming {file}"),
            }
        }
        Some(FileManagerCommand::Delete) => format!("Deleting {file}"),
        Some(FileManagerCommand::Other(command)) => {
            tracing::trace!(command, "Unrecognized file_manager command");
            format!("Managing {file}")
        }
        None => format!("Managing {file}"),
    }
}
