/// Public URL of a document: `{base_url}/{blog_dir}/{slug}`.
///
/// Plain concatenation; inputs are expected to be well-formed already.
pub fn build_link(base_url: &str, blog_dir: &str, slug: &str) -> String {
    format!("{base_url}/{blog_dir}/{slug}")
}
