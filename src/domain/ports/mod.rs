mod clock_port;
mod color_port;
mod presenter_port;

pub use clock_port::Clock;
pub use color_port::ColorSource;
pub use presenter_port::{PresentError, PresenterPort};

#[cfg(test)]
pub mod mocks {
    pub use super::clock_port::mock::ManualClock;
    pub use super::color_port::MockColorSource;
    pub use super::presenter_port::mock::RecordingPresenter;
}
