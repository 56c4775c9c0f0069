pub mod universalis;
