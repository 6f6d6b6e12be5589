//! Navigation boundary between the interactive components and the shell.
//! Components only ever emit a [`Target`]; how a route change or a scroll
//! actually happens is the shell's business.

/// Where a component wants the shell to take the viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The landing page.
    Home,
    /// A named section of the landing page, scrolled into view,
    /// e.g. `take-action`.
    HomeSection(String),
}

/// Single callback every component funnels its route changes through.
pub trait Navigate {
    fn go(&self, target: Target);
}

impl<F> Navigate for F
where
    F: Fn(Target),
{
    fn go(&self, target: Target) {
        self(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn closures_are_navigators() {
        let visited = RefCell::new(Vec::new());
        let shell = |target: Target| visited.borrow_mut().push(target);

        shell.go(Target::Home);
        shell.go(Target::HomeSection("take-action".into()));
        assert_eq!(*visited.borrow(), [Target::Home, Target::HomeSection("take-action".into())]);
    }
}
