use polyrun_core::SourceUnit;

pub const BEGIN_SOURCE_MARKER: &str = "----- BEGIN SOURCE -----";
pub const END_SOURCE_MARKER: &str = "----- END SOURCE -----";

/// System message sent with every completion request
pub const SYSTEM_CONTRACT: &str = "You translate arbitrary source text into JavaScript. \
Produce runnable modern JavaScript only. Preserve the behavior of the input. \
Resolve ambiguity pragmatically. Avoid markdown fences unless unavoidable.";

/// Build the user prompt for `unit`. The source text is embedded verbatim.
pub fn build_prompt(unit: &SourceUnit) -> String {
    format!(
        "Translate the following source into JavaScript that runs under Node.js.\n\
         Produce runnable modern JavaScript only, preserve behavior, resolve ambiguity \
         pragmatically, and avoid markdown fences unless unavoidable.\n\
         Source id: {id}\n\
         Language hint: {hint}\n\
         {BEGIN_SOURCE_MARKER}\n\
         {text}\n\
         {END_SOURCE_MARKER}",
        id = unit.id(),
        hint = unit.language_label(),
        text = unit.text(),
    )
}
