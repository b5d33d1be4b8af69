mod tests_file_paths;
mod tests_semantic_ids;
