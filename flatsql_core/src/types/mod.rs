/// One table row. Row 0 of a loaded table image is the header; cells are
/// opaque text with no column typing.
pub type Row = Vec<String>;
