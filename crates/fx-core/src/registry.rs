use crate::surface::TargetId;

/// Page elements each effect applies to, captured once at init.
///
/// The host resolves its own markers (selectors, attributes) into ids; the
/// engine never discovers targets itself and elements added later are not
/// picked up.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    pub magnetic: Vec<TargetId>,
    pub ripple: Vec<TargetId>,
    pub glow: Vec<TargetId>,
    pub reveal: Vec<TargetId>,
    /// Typing targets with their original text.
    pub typing: Vec<(TargetId, String)>,
    /// Progress bars with their declared fill width.
    pub progress: Vec<(TargetId, String)>,
    pub notices: Vec<TargetId>,
    pub parallax: Option<TargetId>,
    pub submit_buttons: Vec<TargetId>,
    pub theme_icon: Option<TargetId>,
}

impl TargetRegistry {
    /// Every target that needs an intersection observer.
    pub fn observed(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.reveal
            .iter()
            .copied()
            .chain(self.typing.iter().map(|(t, _)| *t))
            .chain(self.progress.iter().map(|(t, _)| *t))
    }
}
