//! Scoped access to the host's render state.
//!
//! A GPU host has to switch global state (render target, tone mapping, ...)
//! for the duration of a tick and put it back afterwards. `HostGuard` holds
//! whatever the host saved and hands it back on drop, so restoration runs on
//! every exit path.

use crate::error::FireError;
use crate::systems::passes::PassKind;

pub trait RenderHost {
    /// State captured by `acquire` and returned by `release`
    type Saved;

    fn acquire(&mut self) -> Result<Self::Saved, FireError>;

    fn release(&mut self, saved: Self::Saved);

    /// Called before every pass of a tick. An error aborts the tick.
    fn before_pass(&mut self, _kind: PassKind) -> Result<(), FireError> {
        Ok(())
    }
}

/// No render state to manage (CPU-only embedding, tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl RenderHost for Headless {
    type Saved = ();

    fn acquire(&mut self) -> Result<(), FireError> {
        Ok(())
    }

    fn release(&mut self, _saved: ()) {}
}

pub struct HostGuard<'h, H: RenderHost> {
    host: &'h mut H,
    saved: Option<H::Saved>,
}

impl<'h, H: RenderHost> HostGuard<'h, H> {
    pub fn acquire(host: &'h mut H) -> Result<Self, FireError> {
        let saved = host.acquire()?;
        Ok(Self { host, saved: Some(saved) })
    }

    pub fn before_pass(&mut self, kind: PassKind) -> Result<(), FireError> {
        self.host.before_pass(kind)
    }
}

impl<H: RenderHost> Drop for HostGuard<'_, H> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.host.release(saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        depth: u32,
        released: u32,
    }

    impl RenderHost for Recorder {
        type Saved = u32;

        fn acquire(&mut self) -> Result<u32, FireError> {
            self.depth += 1;
            Ok(self.depth)
        }

        fn release(&mut self, saved: u32) {
            assert_eq!(saved, self.depth);
            self.depth -= 1;
            self.released += 1;
        }

        fn before_pass(&mut self, kind: PassKind) -> Result<(), FireError> {
            match kind {
                PassKind::Drift => Err(FireError::Host("drift unavailable".into())),
                _ => Ok(()),
            }
        }
    }

    fn run(host: &mut Recorder) -> Result<(), FireError> {
        let mut guard = HostGuard::acquire(host)?;
        guard.before_pass(PassKind::Source)?;
        guard.before_pass(PassKind::Drift)?;
        Ok(())
    }

    #[test]
    fn guard_releases_on_error_path() {
        let mut host = Recorder::default();
        assert!(run(&mut host).is_err());
        assert_eq!(host.depth, 0);
        assert_eq!(host.released, 1);
    }
}
