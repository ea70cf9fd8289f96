//! Logging shims that compile away without the `defmt` feature.

#![allow(unused_macros)]

macro_rules! trace {
    ($($e:expr),* $(,)?) => {
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($e),*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$e),*);
    };
}

macro_rules! warning {
    ($($e:expr),* $(,)?) => {
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($e),*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$e),*);
    };
}

pub(crate) use trace;
pub(crate) use warning;
