pub mod audio_toggle;
pub mod chrome;
pub mod relation_graph;
pub mod work_gallery;
