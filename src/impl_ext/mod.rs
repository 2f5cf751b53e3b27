// Crate-internal.
// ---

pub(crate) mod display_contexts {
    pub(crate) mod currency_precision;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext` in the root of the
    // crate.

    pub mod display_contexts {
        pub use crate::impl_ext::display_contexts::currency_precision::*;
    }
}
