use kernel::model::id::{EnrollmentId, TicketId, TicketTypeId};
use kernel::model::ticket::{Ticket, TicketStatus, TicketType};
use shared::error::AppError;

// tickets と ticket_types を JOIN した 1 行分
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub ticket_type_id: TicketTypeId,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            id,
            enrollment_id,
            status,
            ticket_type_id,
            is_remote,
            includes_hotel,
        } = value;
        let status = status
            .parse::<TicketStatus>()
            .map_err(AppError::ConversionEntityError)?;
        Ok(Ticket {
            id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: ticket_type_id,
                is_remote,
                includes_hotel,
            },
        })
    }
}
