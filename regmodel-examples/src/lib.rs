//! Runnable examples of regmodel, see the `examples` directory.
