pub mod search_hit;
