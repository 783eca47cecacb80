use uigen_core::preferences::SpinnerStyle;

const BRAILLE_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const LINE_FRAMES: &[char] = &['-', '\\', '|', '/'];

pub fn get_spinner_char(style: SpinnerStyle, state: usize) -> char {
    let frames = match style {
        SpinnerStyle::Braille => BRAILLE_FRAMES,
        SpinnerStyle::Line => LINE_FRAMES,
    };
    frames[state % frames.len()]
}
