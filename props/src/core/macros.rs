#[macro_export]
/// Implements `PropertyValue` for types whose canonical converter is a
/// `Lazy<Converter<_>>` static.
///
/// ```
/// use easy_props::prelude::*;
/// use easy_props::impl_property_value;
/// use once_cell::sync::Lazy;
/// use std::num::ParseIntError;
///
/// pub struct Port(u16);
///
/// static PORT: Lazy<Converter<Port>> = Lazy::new(|| {
///     Converter::guarding("Port", ExpectedFailure::of::<ParseIntError>(), |s| {
///         s.parse().map(Port)
///     })
/// });
///
/// impl_property_value!(Port => PORT);
///
/// let location = PropertyLocation::in_source(PropertySource::environment(), "PORT");
/// assert_eq!(Port::parse(&location, "80").unwrap().0, 80);
/// ```
macro_rules! impl_property_value {
    ($($t:ty => $converter:path),* $(,)?) => {
        $(
            impl $crate::PropertyValue for $t {
                fn converter() -> $crate::Converter<Self> {
                    (*$converter).clone()
                }
            }
        )*
    };
}
