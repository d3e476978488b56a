//! Display names for converted textures.

use std::path::{Path, PathBuf};

use crate::config::NamingConfig;

/// Maps source texture file names to their display file names.
#[derive(Debug, Clone)]
pub struct NameTransformer {
    config: NamingConfig,
}

impl NameTransformer {
    /// Create a new transformer with the given naming rules.
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    /// Display file name for a source file name.
    ///
    /// Drops the extension, strips the marker suffix if present, upper-cases
    /// the first character and appends the target extension:
    /// `hero_r.dds` becomes `Hero.png`.
    pub fn display_name(&self, file_name: &str) -> String {
        let (base, _) = split_extension(file_name);
        let base = if self.config.marker_suffix.is_empty() {
            base
        } else {
            base.strip_suffix(self.config.marker_suffix.as_str())
                .unwrap_or(base)
        };

        let mut name = capitalize_first(base);
        name.push('.');
        name.push_str(&self.config.target_extension);
        name
    }

    /// Where the converted file for `file_name` should end up inside `dir`.
    pub fn target_path(&self, dir: &Path, file_name: &str) -> PathBuf {
        dir.join(self.display_name(file_name))
    }
}

/// Split off the last extension, including its dot.
///
/// Leading dots belong to the base name, so `.dds` has no extension.
pub(crate) fn split_extension(file_name: &str) -> (&str, &str) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(i) => file_name.split_at(leading + i),
        None => (file_name, ""),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transformer() -> NameTransformer {
        NameTransformer::new(NamingConfig::default())
    }

    #[test]
    fn test_strips_marker_and_capitalizes() {
        assert_eq!(transformer().display_name("hero_r.dds"), "Hero.png");
    }

    #[test]
    fn test_capitalizes_without_marker() {
        assert_eq!(transformer().display_name("villain.dds"), "Villain.png");
    }

    #[test]
    fn test_already_capitalized_is_unchanged() {
        assert_eq!(transformer().display_name("Zed.dds"), "Zed.png");
    }

    #[test]
    fn test_marker_only_stripped_at_end() {
        assert_eq!(transformer().display_name("r_robot.dds"), "R_robot.png");
        assert_eq!(transformer().display_name("hero_r_r.dds"), "Hero_r.png");
    }

    #[test]
    fn test_uppercase_extension() {
        assert_eq!(transformer().display_name("hero_r.DDS"), "Hero.png");
    }

    #[test]
    fn test_marker_only_base_becomes_empty() {
        assert_eq!(transformer().display_name("_r.dds"), ".png");
    }

    #[test]
    fn test_inner_dots_are_kept() {
        assert_eq!(transformer().display_name("ellen.v2_r.dds"), "Ellen.v2.png");
    }

    #[test]
    fn test_unicode_first_character() {
        assert_eq!(transformer().display_name("élise.dds"), "Élise.png");
    }

    #[test]
    fn test_custom_marker() {
        let t = NameTransformer::new(NamingConfig {
            marker_suffix: "_l".to_string(),
            ..NamingConfig::default()
        });
        assert_eq!(t.display_name("hero_l.dds"), "Hero.png");
        assert_eq!(t.display_name("hero_r.dds"), "Hero_r.png");
    }

    #[test]
    fn test_target_path_joins_directory() {
        let path = transformer().target_path(Path::new("/avatars"), "anby_r.dds");
        assert_eq!(path, PathBuf::from("/avatars/Anby.png"));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.dds"), ("a", ".dds"));
        assert_eq!(split_extension("a.b.dds"), ("a.b", ".dds"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".dds"), (".dds", ""));
        assert_eq!(split_extension("..dds"), ("..dds", ""));
    }
}
