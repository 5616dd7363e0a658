/// Anything addressable by its store-assigned integer id.
pub trait Entity {
    fn id(&self) -> i64;
}
