#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    #[default]
    Searching,
    Augmenting,
    // every unit of demand was routed
    Exhausted,
    // the sink became unreachable with demand left over
    Blocked,
}

impl Status {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Exhausted | Status::Blocked)
    }
}
