/// Lowercases `text`, replaces anything outside `[a-z0-9+#.-]` with a space,
/// and splits on whitespace. The kept punctuation preserves tech terms such
/// as "c++", "c#", "node.js", and "ci-cd".
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '#' | '.' | '-' => c,
            _ => ' ',
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
