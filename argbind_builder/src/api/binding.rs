use crate::api::coerce::{Bindable, CoerceError};
use crate::model::FieldType;

/// One entry of a destination's binding table: a field name, its declared type, and the setter that writes into the field.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Binding, FieldType};
///
/// let mut size: u16 = 0;
/// let binding = Binding::field(&mut size, "size");
///
/// assert_eq!(binding.name(), "size");
/// assert_eq!(binding.field_type(), FieldType::U16);
/// ```
pub struct Binding<'a> {
    name: String,
    field_type: FieldType,
    // The setter erases T so that fields of all types may sit in one table.
    setter: Box<dyn FnMut(&str) -> Result<(), CoerceError> + 'a>,
}

impl<'a> Binding<'a> {
    /// Bind a field variable to the flag `name`.
    ///
    /// The type tag comes from the variable's [`Bindable`] type.
    pub fn field<T>(variable: &'a mut T, name: impl Into<String>) -> Self
    where
        T: Bindable + 'a,
    {
        Self {
            name: name.into(),
            field_type: T::FIELD_TYPE,
            setter: Box::new(move |token| {
                *variable = T::coerce(token)?;
                Ok(())
            }),
        }
    }

    /// The flag name of this binding.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type of the bound field.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub(crate) fn assign(&mut self, token: &str) -> Result<(), CoerceError> {
        (self.setter)(token)
    }
}

impl<'a> std::fmt::Debug for Binding<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Binding[--{n}: {t}]", n = self.name, t = self.field_type)
    }
}
