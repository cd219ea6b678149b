mod samples;
mod specification;
