use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl Ticket {
    // 支払い済み・現地参加・宿泊付きのチケットのみホテル情報を閲覧できる
    pub fn grants_hotel_access(&self) -> bool {
        self.status == TicketStatus::Paid
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(format!("unknown ticket status: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub is_remote: bool,
    pub includes_hotel: bool,
}
