//! String validator

use regex::Regex;

use crate::constraints::string::{
    IpVersion, UrlOptions, UuidVersion, string_email, string_ip, string_length_eq,
    string_length_ge, string_length_gt, string_length_le, string_length_lt, string_length_ne,
    string_regex, string_url, string_uuid,
};
use crate::foundation::{ValidatorExt, Value};

primitive_validator! {
    /// Validates string primitives.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use nebula_shape::prelude::*;
    ///
    /// let handle = shapes::string().length_ge(3).length_le(16);
    /// assert!(handle.is(&Value::from("ada")));
    /// assert!(!handle.is(&Value::from("a")));
    /// ```
    pub StringValidator => String;
    label = "s.string", message = "Expected a string primitive";
    match Value::String(s) => s.clone();
}

impl StringValidator {
    #[must_use]
    pub fn length_lt(&self, length: usize) -> Self {
        self.add_constraint(string_length_lt(length))
    }

    #[must_use]
    pub fn length_le(&self, length: usize) -> Self {
        self.add_constraint(string_length_le(length))
    }

    #[must_use]
    pub fn length_gt(&self, length: usize) -> Self {
        self.add_constraint(string_length_gt(length))
    }

    #[must_use]
    pub fn length_ge(&self, length: usize) -> Self {
        self.add_constraint(string_length_ge(length))
    }

    #[must_use]
    pub fn length_eq(&self, length: usize) -> Self {
        self.add_constraint(string_length_eq(length))
    }

    #[must_use]
    pub fn length_ne(&self, length: usize) -> Self {
        self.add_constraint(string_length_ne(length))
    }

    #[must_use]
    pub fn email(&self) -> Self {
        self.add_constraint(string_email())
    }

    #[must_use]
    pub fn url(&self, options: UrlOptions) -> Self {
        self.add_constraint(string_url(options))
    }

    #[must_use]
    pub fn uuid(&self, version: UuidVersion) -> Self {
        self.add_constraint(string_uuid(version))
    }

    #[must_use]
    pub fn regex(&self, regex: Regex) -> Self {
        self.add_constraint(string_regex(regex))
    }

    #[must_use]
    pub fn ipv4(&self) -> Self {
        self.ip(IpVersion::V4)
    }

    #[must_use]
    pub fn ipv6(&self) -> Self {
        self.ip(IpVersion::V6)
    }

    #[must_use]
    pub fn ip(&self, version: IpVersion) -> Self {
        self.add_constraint(string_ip(version))
    }
}
