//! Line-drawing glyphs for tree output

/// The connector glyphs for one visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChars {
    /// Vertical continuation drawn below a non-last item
    pub line: &'static str,
    pub branch: &'static str,
    pub last_item: &'static str,
    pub middle_item: &'static str,
    /// Blank indentation drawn below a last item
    pub indent: &'static str,
}

const UNICODE: TreeChars = TreeChars {
    line: "│   ",
    branch: "├── ",
    last_item: "└── ",
    middle_item: "├── ",
    indent: "    ",
};

const UNICODE_COMPACT: TreeChars = TreeChars {
    line: "│",
    branch: "├",
    last_item: "└",
    middle_item: "├",
    indent: " ",
};

const ASCII: TreeChars = TreeChars {
    line: "|   ",
    branch: "|-- ",
    last_item: "`-- ",
    middle_item: "+-- ",
    indent: "    ",
};

const ASCII_COMPACT: TreeChars = TreeChars {
    line: "|",
    branch: "|",
    last_item: "`",
    middle_item: "+",
    indent: " ",
};

impl TreeChars {
    /// Select the glyph set for a (unicode, compact) combination.
    pub fn select(unicode: bool, compact: bool) -> Self {
        match (unicode, compact) {
            (true, false) => UNICODE,
            (true, true) => UNICODE_COMPACT,
            (false, false) => ASCII,
            (false, true) => ASCII_COMPACT,
        }
    }

    /// Connector glyph for an item.
    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last_item } else { self.middle_item }
    }

    /// Prefix for the children of an item.
    pub fn child_prefix(&self, prefix: &str, is_last: bool) -> String {
        let tail = if is_last { self.indent } else { self.line };
        format!("{}{}", prefix, tail)
    }
}
