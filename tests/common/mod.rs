pub mod synthetic_labels;
