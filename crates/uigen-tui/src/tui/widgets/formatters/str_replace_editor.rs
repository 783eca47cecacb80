use super::helpers::file_name;
use uigen_tools::tools::{EditorCommand, StrReplaceEditorParams};

pub fn message(params: &StrReplaceEditorParams) -> String {
    let file = file_name(params.path.as_deref());

    match &params.command {
        Some(EditorCommand::View) => format!("Viewing {file}"),
        Some(EditorCommand::Create) => format!("Creating {file}"),
        Some(EditorCommand::StrReplace | EditorCommand::Insert) => format!("Editing {file}"),
        Some(EditorCommand::UndoEdit) => format!("Undoing edit in {file}"),
        Some(EditorCommand::Other(command)) => {
            tracing::trace!(command, "Unrecognized str_replace_editor command");
            format!("Working on {file}")
        }
        None => format!("Working on {file}"),
    }
}
