/// Capability shared by every dataset kind: an optional, mutable title.
///
/// `None` means "no title" and is distinct from an empty title.
pub trait Dataset {
    fn title(&self) -> Option<&str>;

    fn set_title(&mut self, title: Option<String>);
}
