pub mod dragdrop_env;
