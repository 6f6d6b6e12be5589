use core::fmt::{self, Display};
use image::RgbImage;

/// The one way camera capture fails: permission denied or no usable device.
/// Surfaced to the user as a blocking notice; there is no retry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Unavailable,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unavailable => "Unable to access camera. Please check permissions.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Boundary to whatever produces decoded frames: a live camera, a file
/// picker, or a test double. The analysis never talks to hardware itself.
pub trait FrameSource {
    fn capture(&mut self) -> Result<RgbImage>;
}

impl<F> FrameSource for F
where
    F: FnMut() -> Result<RgbImage>,
{
    fn capture(&mut self) -> Result<RgbImage> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greenery;

    #[test]
    fn closures_act_as_frame_sources() {
        let mut source = || Ok(RgbImage::new(4, 4));
        let frame = source.capture().unwrap();
        assert_eq!(greenery::count_green_pixels(&frame), 0);
    }

    #[test]
    fn unavailable_reads_as_a_blocking_notice() {
        let mut source = || Err(Error::Unavailable);
        let _: Result<RgbImage> = source.capture();
        assert_eq!(Error::Unavailable.to_string(), "Unable to access camera. Please check permissions.");
    }
}
