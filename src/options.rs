// src/options.rs
use derive_builder::Builder;
use tex_parser_ports::filesystem::ListingPlan;

/// Knobs for [`FileSystem::list_files_with`](crate::filesystem::FileSystem::list_files_with).
///
/// ```
/// use tex_parser::options::ListOptionsBuilder;
///
/// let options = ListOptionsBuilder::default()
///     .include_subdirectories(true)
///     .max_depth(3usize)
///     .build()
///     .unwrap();
/// assert!(!options.follow_links);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ListOptions {
    /// Walk the whole subtree rather than the immediate children only.
    #[builder(default)]
    pub include_subdirectories: bool,
    /// Descend into symlinked directories when walking recursively.
    #[builder(default)]
    pub follow_links: bool,
    /// Deepest level a recursive walk may reach; immediate children are level 1.
    #[builder(default, setter(strip_option))]
    pub max_depth: Option<usize>,
}

impl ListOptions {
    #[must_use]
    pub fn new(include_subdirectories: bool) -> Self {
        Self { include_subdirectories, ..Self::default() }
    }

    pub(crate) fn to_plan(&self) -> ListingPlan {
        ListingPlan {
            recursive: self.include_subdirectories,
            follow_links: self.follow_links,
            max_depth: if self.include_subdirectories { self.max_depth } else { None },
        }
    }
}
