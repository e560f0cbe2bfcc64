//! Test fixtures - reusable tree documents.

/// Two parents with two and one children, plus a top-level leaf.
///
/// ```text
/// 1 Home
///   1-1 a.md
///   1-2 b.md
/// 2 Project
///   2-1 c.md
/// 3 README
/// ```
pub const SAMPLE_TREE_JSON: &str = r#"[
  {
    "id": "home",
    "label": "Home",
    "children": [
      { "id": "a", "label": "a.md" },
      { "id": "b", "label": "b.md" }
    ]
  },
  {
    "id": "project",
    "label": "Project",
    "children": [{ "id": "c", "label": "c.md" }]
  },
  { "id": "readme", "label": "README" }
]"#;

/// The same tree as YAML, with explicit tree ids
pub const SAMPLE_TREE_YAML: &str = r#"nodes:
  - id: home
    label: Home
    tree_id: "1"
    children:
      - id: a
        label: a.md
        tree_id: "1-1"
      - id: b
        label: b.md
        tree_id: "1-2"
  - id: project
    label: Project
    children:
      - id: c
        label: c.md
  - id: readme
    label: README
"#;

/// The same tree as TOML
pub const SAMPLE_TREE_TOML: &str = r#"[[nodes]]
id = "home"
label = "Home"

[[nodes.children]]
id = "a"
label = "a.md"

[[nodes.children]]
id = "b"
label = "b.md"

[[nodes]]
id = "project"
label = "Project"

[[nodes.children]]
id = "c"
label = "c.md"

[[nodes]]
id = "readme"
label = "README"
"#;
