/// The renderer configuration.
///
/// Use [`Settings::default()`] to get the default configuration and
/// [`Settings::builder()`] to create a custom configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub(crate) volume_route: String,
    pub(crate) pid_arg: String,
    pub(crate) title_property: String,
    pub(crate) date_property: String,
    pub(crate) date_separator: String,
    pub(crate) search_target: String,
}

/// A builder for the renderer configuration.
///
/// This struct is typically created using [`Settings::builder()`].
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    volume_route: Option<String>,
    pid_arg: Option<String>,
    title_property: Option<String>,
    date_property: Option<String>,
    date_separator: Option<String>,
    search_target: Option<String>,
}

impl Default for Settings {
    /// Returns the default configuration.
    ///
    /// This is equivalent to the following.
    /// ```
    /// use volume_header::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .volume_route("books:volume", "pid")
    ///     .title_property("schema:name")
    ///     .date_property("schema:datePublished")
    ///     .date_separator("; ")
    ///     .search_target("volume-search")
    ///     .build();
    /// assert_eq!(settings, Settings::default());
    /// ```
    #[inline]
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let settings = volume_header::Settings::builder()
    ///     .volume_route("library:volume", "id")
    ///     .build();
    /// ```
    #[inline]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// The name of the route used to compute the volume URL.
    #[inline]
    pub fn volume_route(&self) -> &str {
        &self.volume_route
    }

    /// The route argument the volume `pid` is passed as.
    #[inline]
    pub fn pid_arg(&self) -> &str {
        &self.pid_arg
    }

    /// The RDFa property for the title.
    #[inline]
    pub fn title_property(&self) -> &str {
        &self.title_property
    }

    /// The RDFa property for each date.
    #[inline]
    pub fn date_property(&self) -> &str {
        &self.date_property
    }

    /// The separator between dates.
    #[inline]
    pub fn date_separator(&self) -> &str {
        &self.date_separator
    }

    /// The element id of the search form container.
    #[inline]
    pub fn search_target(&self) -> &str {
        &self.search_target
    }
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    #[inline]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            volume_route: None,
            pid_arg: None,
            title_property: None,
            date_property: None,
            date_separator: None,
            search_target: None,
        }
    }

    /// Set the route used for the volume URL and the argument the `pid` is
    /// passed as.
    ///
    /// # Panics
    ///
    /// If either of the strings are empty.
    #[inline]
    pub fn volume_route(&mut self, name: &str, pid_arg: &str) -> &mut Self {
        assert!(!name.is_empty() && !pid_arg.is_empty());
        self.volume_route = Some(name.to_owned());
        self.pid_arg = Some(pid_arg.to_owned());
        self
    }

    /// Set the RDFa property emitted on the title.
    ///
    /// # Panics
    ///
    /// If the string is empty.
    #[inline]
    pub fn title_property(&mut self, property: &str) -> &mut Self {
        assert!(!property.is_empty());
        self.title_property = Some(property.to_owned());
        self
    }

    /// Set the RDFa property emitted on each date.
    ///
    /// # Panics
    ///
    /// If the string is empty.
    #[inline]
    pub fn date_property(&mut self, property: &str) -> &mut Self {
        assert!(!property.is_empty());
        self.date_property = Some(property.to_owned());
        self
    }

    /// Set the separator written between dates.
    #[inline]
    pub fn date_separator(&mut self, separator: &str) -> &mut Self {
        self.date_separator = Some(separator.to_owned());
        self
    }

    /// Set the element id of the search form container.
    ///
    /// # Panics
    ///
    /// If the string is empty.
    #[inline]
    pub fn search_target(&mut self, id: &str) -> &mut Self {
        assert!(!id.is_empty());
        self.search_target = Some(id.to_owned());
        self
    }

    /// Builds the settings, filling unset values with their defaults.
    pub fn build(&self) -> Settings {
        fn or(value: &Option<String>, default: &str) -> String {
            value.clone().unwrap_or_else(|| default.to_owned())
        }
        Settings {
            volume_route: or(&self.volume_route, "books:volume"),
            pid_arg: or(&self.pid_arg, "pid"),
            title_property: or(&self.title_property, "schema:name"),
            date_property: or(&self.date_property, "schema:datePublished"),
            date_separator: or(&self.date_separator, "; "),
            search_target: or(&self.search_target, "volume-search"),
        }
    }
}
