//! Path composition.
//!
//! The root path is empty. A field step appends `.name` (bare `name` at the
//! root); index and key steps are pre-formatted as `[literal]` and appended
//! the same way, giving paths such as `profile.tags.[1]`.

/// Join a parent path and one step.
pub fn build_path(parent: &str, step: &str) -> String {
    if parent.is_empty() {
        step.to_string()
    } else {
        format!("{parent}.{step}")
    }
}

/// Step for a sequence element.
pub fn index_step(index: usize) -> String {
    format!("[{index}]")
}

/// Step for a mapping entry, given the key's path text.
pub fn key_step(key_text: &str) -> String {
    format!("[{key_text}]")
}
