/// A partial update that can be applied onto a mutable target.
///
/// Implementors hold one [`PatchField`](crate::PatchField) per updatable field of
/// `Target` and write every provided field onto the target, including provided
/// `null`s. Fields that were not provided must leave the target untouched.
pub trait ApplyPatch<Target: ?Sized> {
    /// Writes every provided field onto `target`.
    fn apply_to(self, target: &mut Target);

    /// Returns `true` when no field was provided, i.e. applying is a no-op.
    fn is_empty(&self) -> bool;
}
