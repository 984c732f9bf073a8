/// Post-image range of one unified-diff hunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffHunk {
    pub start: usize,
    pub count: usize,
}

impl DiffHunk {
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Parse the `+start,count` part of a header like `@@ -10,3 +10,4 @@ def foo():`.
    ///
    /// A missing count means a single line, as in `@@ -3 +3 @@`. Ranges whose
    /// end does not fit in `usize` are rejected.
    pub fn parse(header: &str) -> Option<Self> {
        let mut tokens = header.split_whitespace();
        if tokens.next()? != "@@" {
            return None;
        }

        let new_range = tokens
            .take_while(|t| *t != "@@")
            .find_map(|t| t.strip_prefix('+'))?;

        let (start, count): (usize, usize) = match new_range.split_once(',') {
            Some((start, count)) => (start.parse().ok()?, count.parse().ok()?),
            None => (new_range.parse().ok()?, 1),
        };

        start.checked_add(count)?;
        Some(Self { start, count })
    }

    /// Last post-image line covered by the hunk
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.count).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let hunk = DiffHunk::parse("@@ -10,3 +10,3 @@").unwrap();
        assert_eq!(hunk, DiffHunk::new(10, 3));
        assert_eq!(hunk.end(), 12);
    }

    #[test]
    fn test_parse_header_with_section_heading() {
        let hunk = DiffHunk::parse("@@ -40,7 +42,9 @@ class Foo(object):\n").unwrap();
        assert_eq!(hunk, DiffHunk::new(42, 9));
    }

    #[test]
    fn test_parse_header_without_count() {
        assert_eq!(DiffHunk::parse("@@ -3 +3 @@"), Some(DiffHunk::new(3, 1)));
    }

    #[test]
    fn test_parse_empty_post_image() {
        let hunk = DiffHunk::parse("@@ -1,4 +0,0 @@").unwrap();
        assert_eq!(hunk, DiffHunk::new(0, 0));
        assert_eq!(hunk.end(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(DiffHunk::parse(""), None);
        assert_eq!(DiffHunk::parse("diff --git a/x.py b/x.py"), None);
        assert_eq!(DiffHunk::parse("@@ -1,2 @@"), None);
        assert_eq!(DiffHunk::parse("@@ -1,2 +x,2 @@"), None);
        assert_eq!(DiffHunk::parse("@@ -1,2 +1,two @@"), None);
    }

    #[test]
    fn test_parse_rejects_overflowing_range() {
        assert_eq!(DiffHunk::parse("@@ -1,1 +18446744073709551615,2 @@"), None);
        assert_eq!(DiffHunk::parse("@@ -1,1 +2,18446744073709551615 @@"), None);
        assert_eq!(DiffHunk::new(usize::MAX, 2).end(), usize::MAX - 1);
    }
}
