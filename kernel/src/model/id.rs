macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i32);

        impl $id_type {
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            pub fn raw(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $id_type {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<i32> for $id_type {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(UserId);
define_id!(EnrollmentId);
define_id!(TicketId);
define_id!(TicketTypeId);
define_id!(HotelId);
define_id!(RoomId);
