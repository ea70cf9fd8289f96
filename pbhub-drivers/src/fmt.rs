//! Logging shims that compile away without the `defmt` feature.

#![allow(unused_macros)]

macro_rules! debug {
    ($($e:expr),* $(,)?) => {
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($e),*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$e),*);
    };
}

macro_rules! trace {
    ($($e:expr),* $(,)?) => {
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($e),*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$e),*);
    };
}

pub(crate) use debug;
pub(crate) use trace;
