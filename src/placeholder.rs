use url::form_urlencoded;

pub const PLACEHOLDER_ASSET: &str = "/musix-pro3.jpg";

const DEFAULT_SIZE: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderKind {
    Album,
    Artist,
    Playlist,
    User,
    #[default]
    Generic,
}

impl PlaceholderKind {
    fn default_text(self) -> &'static str {
        match self {
            Self::Album => "Album",
            Self::Artist => "Artist",
            Self::Playlist => "Playlist",
            Self::User => "User",
            Self::Generic => "",
        }
    }

    fn default_size(self) -> u32 {
        match self {
            Self::User => 100,
            Self::Generic => DEFAULT_SIZE,
            Self::Album | Self::Artist | Self::Playlist => 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    #[default]
    Gradient,
    Solid,
    Pattern,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub text: Option<String>,
    pub kind: Option<PlaceholderKind>,
    pub style: Option<PlaceholderStyle>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}

impl PlaceholderOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn sized(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn colors(mut self, bg: impl Into<String>, text: impl Into<String>) -> Self {
        self.bg_color = Some(bg.into());
        self.text_color = Some(text.into());
        self
    }
}

pub fn placeholder_image(options: &PlaceholderOptions) -> String {
    let width = options.width.unwrap_or(DEFAULT_SIZE);
    let height = options.height.unwrap_or(DEFAULT_SIZE);

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("width", &width.to_string());
    query.append_pair("height", &height.to_string());

    for (key, value) in [
        ("text", &options.text),
        ("bgColor", &options.bg_color),
        ("textColor", &options.text_color),
    ] {
        if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
            query.append_pair(key, value);
        }
    }

    format!("{PLACEHOLDER_ASSET}?{}", query.finish())
}

pub fn album_cover(options: PlaceholderOptions) -> String {
    category_image(PlaceholderKind::Album, options)
}

pub fn artist_image(options: PlaceholderOptions) -> String {
    category_image(PlaceholderKind::Artist, options)
}

pub fn playlist_cover(options: PlaceholderOptions) -> String {
    category_image(PlaceholderKind::Playlist, options)
}

pub fn user_avatar(options: PlaceholderOptions) -> String {
    category_image(PlaceholderKind::User, options)
}

fn category_image(kind: PlaceholderKind, options: PlaceholderOptions) -> String {
    let size = kind.default_size();
    let resolved = PlaceholderOptions {
        width: options.width.filter(|value| *value > 0).or(Some(size)),
        height: options.height.filter(|value| *value > 0).or(Some(size)),
        text: options
            .text
            .filter(|text| !text.is_empty())
            .or_else(|| Some(kind.default_text().to_string())),
        kind: options.kind.or(Some(kind)),
        ..options
    };
    placeholder_image(&resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prop_assert_eq;

    #[test]
    fn bare_call_uses_global_defaults() {
        assert_eq!(
            placeholder_image(&PlaceholderOptions::default()),
            "/musix-pro3.jpg?width=400&height=400"
        );
    }

    #[test]
    fn user_avatar_defaults_to_small_square() {
        assert_eq!(
            user_avatar(PlaceholderOptions::default()),
            "/musix-pro3.jpg?width=100&height=100&text=User"
        );
    }

    #[test]
    fn category_defaults_fill_missing_fields() {
        assert_eq!(
            album_cover(PlaceholderOptions::default()),
            "/musix-pro3.jpg?width=300&height=300&text=Album"
        );
        assert_eq!(
            artist_image(PlaceholderOptions::default()),
            "/musix-pro3.jpg?width=300&height=300&text=Artist"
        );
        assert_eq!(
            playlist_cover(PlaceholderOptions::default()),
            "/musix-pro3.jpg?width=300&height=300&text=Playlist"
        );
    }

    #[test]
    fn caller_values_override_category_defaults() {
        let url = playlist_cover(PlaceholderOptions::text("Top Hits").sized(200, 200));
        assert_eq!(url, "/musix-pro3.jpg?width=200&height=200&text=Top+Hits");
    }

    #[test]
    fn zero_size_falls_back_to_category_default() {
        let url = album_cover(PlaceholderOptions::text("Stay").sized(0, 0));
        assert_eq!(url, "/musix-pro3.jpg?width=300&height=300&text=Stay");
    }

    #[test]
    fn colors_are_appended_after_text_and_encoded() {
        let url = placeholder_image(
            &PlaceholderOptions::text("Harry's House").colors("#1f2937", "#ffffff"),
        );
        assert_eq!(
            url,
            "/musix-pro3.jpg?width=400&height=400&text=Harry%27s+House&bgColor=%231f2937&textColor=%23ffffff"
        );
    }

    #[test]
    fn empty_optional_values_are_omitted() {
        let options = PlaceholderOptions {
            text: Some(String::new()),
            bg_color: Some(String::new()),
            style: Some(PlaceholderStyle::Pattern),
            kind: Some(PlaceholderKind::Artist),
            ..PlaceholderOptions::default()
        };
        assert_eq!(
            placeholder_image(&options),
            "/musix-pro3.jpg?width=400&height=400"
        );
    }

    proptest::proptest! {
        #[test]
        fn builder_is_deterministic(
            width in proptest::option::of(0u32..4096),
            height in proptest::option::of(0u32..4096),
            text in proptest::option::of(".{0,24}"),
            bg in proptest::option::of("[#a-f0-9]{0,7}"),
            fg in proptest::option::of("[#a-f0-9]{0,7}"),
        ) {
            let options = PlaceholderOptions {
                width,
                height,
                text,
                bg_color: bg,
                text_color: fg,
                ..PlaceholderOptions::default()
            };
            prop_assert_eq!(placeholder_image(&options), placeholder_image(&options.clone()));
            prop_assert_eq!(user_avatar(options.clone()), user_avatar(options));
        }
    }
}
