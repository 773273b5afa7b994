//! Reserved names for members synthesized by translator passes.

/// Default name of the per-type static initialization routine.
///
/// The target runtime invokes a class method with this name before the first
/// use of the class's static state.
pub const CLASS_INITIALIZER_NAME: &str = "initialize";

/// Name recorded on constructor bindings. Constructors print with the name
/// of their declaring type.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Well-known root of the class hierarchy.
pub const OBJECT_TYPE_NAME: &str = "java.lang.Object";

/// Well-known string class.
pub const STRING_TYPE_NAME: &str = "java.lang.String";

/// Implicit superclass of every enum type.
pub const ENUM_TYPE_NAME: &str = "java.lang.Enum";
