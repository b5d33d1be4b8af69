mod tests_attachments;
mod tests_collisions;
mod tests_reload;
