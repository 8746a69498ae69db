pub mod packager;
