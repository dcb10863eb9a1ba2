pub mod remote_file;
