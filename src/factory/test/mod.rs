mod non_integer_pk;
mod with_file;
