pub mod cell_index_error;
