//! Integer identifier newtypes for domain entities.
//!
//! The data store hands out sequential integer keys; wrapping them keeps a
//! ticket id from being passed where a hotel id is expected.

/// Define a copyable integer id newtype with the shared conversions.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw storage key.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw storage key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id! {
    /// Stable user identifier, as validated by the token layer.
    UserId
}

define_id! {
    /// Identifier of a user's event enrollment.
    EnrollmentId
}

define_id! {
    /// Identifier of an address attached to an enrollment.
    AddressId
}

define_id! {
    /// Identifier of a purchased ticket.
    TicketId
}

define_id! {
    /// Identifier of a ticket category.
    TicketTypeId
}

define_id! {
    /// Identifier of a hotel.
    HotelId
}

define_id! {
    /// Identifier of a hotel room.
    RoomId
}
