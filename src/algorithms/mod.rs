pub mod alphabetize;
pub mod compare;
pub mod normalize;
pub mod paa;
pub mod sliding_window;
pub mod transform;
