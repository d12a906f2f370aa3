use rusqlite::{params, Connection};

use crate::models::{
    Booking, BookingStatus, Invoice, InvoiceStatus, Review, UserProfile, UserRole,
};

// ── Bookings ──

pub fn insert_booking(
    conn: &Connection,
    customer_name: &str,
    phone_number: &str,
    device_model: &str,
    issue_description: &str,
    photo_notes: Option<&str>,
    payment_method: &str,
    preferred_date_time: i64,
    created_at: i64,
) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO bookings (customer_name, phone_number, device_model, issue_description, photo_notes, payment_method, preferred_date_time, created_at, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 'pending')",
        params![
            customer_name,
            phone_number,
            device_model,
            issue_description,
            photo_notes,
            payment_method,
            preferred_date_time,
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_booking(conn: &Connection, id: i64) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, customer_name, phone_number, device_model, issue_description, photo_notes, payment_method, preferred_date_time, created_at, status
         FROM bookings WHERE id = ?1",
        params![id],
        parse_booking_row,
    );

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_name, phone_number, device_model, issue_description, photo_notes, payment_method, preferred_date_time, created_at, status
         FROM bookings ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], parse_booking_row)?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row?);
    }
    Ok(bookings)
}

pub fn get_bookings_by_phone(conn: &Connection, phone: &str) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_name, phone_number, device_model, issue_description, photo_notes, payment_method, preferred_date_time, created_at, status
         FROM bookings WHERE phone_number = ?1 ORDER BY id DESC",
    )?;

    let rows = stmt.query_map(params![phone], parse_booking_row)?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row?);
    }
    Ok(bookings)
}

pub fn update_booking_status(
    conn: &Connection,
    id: i64,
    status: BookingStatus,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(count > 0)
}

pub fn update_booking_payment_method(
    conn: &Connection,
    id: i64,
    payment_method: &str,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings SET payment_method = ?1 WHERE id = ?2",
        params![payment_method, id],
    )?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    let status_str: String = row.get(9)?;
    Ok(Booking {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        phone_number: row.get(2)?,
        device_model: row.get(3)?,
        issue_description: row.get(4)?,
        photo_notes: row.get(5)?,
        payment_method: row.get(6)?,
        preferred_date_time: row.get(7)?,
        timestamp: row.get(8)?,
        status: BookingStatus::parse(&status_str).unwrap_or(BookingStatus::Pending),
    })
}

// ── Invoices ──

pub fn insert_invoice(
    conn: &Connection,
    booking_id: i64,
    customer_name: &str,
    amount: &str,
    description: &str,
    created_at: i64,
    public_access_code: &str,
) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO invoices (booking_id, customer_name, amount, description, status, created_at, public_access_code)
         VALUES (?1, ?2, ?3, ?4, 'pending', ?5, ?6)",
        params![
            booking_id,
            customer_name,
            amount,
            description,
            created_at,
            public_access_code,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_invoice(conn: &Connection, id: i64) -> anyhow::Result<Option<Invoice>> {
    let result = conn.query_row(
        "SELECT id, booking_id, customer_name, amount, description, status, created_at, payment_date, public_access_code
         FROM invoices WHERE id = ?1",
        params![id],
        parse_invoice_row,
    );

    match result {
        Ok(invoice) => Ok(Some(invoice)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_invoices(conn: &Connection) -> anyhow::Result<Vec<Invoice>> {
    let mut stmt = conn.prepare(
        "SELECT id, booking_id, customer_name, amount, description, status, created_at, payment_date, public_access_code
         FROM invoices ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], parse_invoice_row)?;

    let mut invoices = vec![];
    for row in rows {
        invoices.push(row?);
    }
    Ok(invoices)
}

/// Marks an invoice paid, keeping the original payment date if one is
/// already set so that re-invocation is idempotent.
pub fn mark_invoice_paid(conn: &Connection, id: i64, payment_date: i64) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE invoices SET status = 'paid', payment_date = COALESCE(payment_date, ?1) WHERE id = ?2",
        params![payment_date, id],
    )?;
    Ok(count > 0)
}

fn parse_invoice_row(row: &rusqlite::Row) -> rusqlite::Result<Invoice> {
    let status_str: String = row.get(5)?;
    Ok(Invoice {
        id: row.get(0)?,
        booking_id: row.get(1)?,
        customer_name: row.get(2)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        status: InvoiceStatus::parse(&status_str).unwrap_or(InvoiceStatus::Pending),
        created_at: row.get(6)?,
        payment_date: row.get(7)?,
        public_access_code: row.get(8)?,
    })
}

// ── Reviews ──

pub fn insert_review(
    conn: &Connection,
    author: &str,
    review_text: &str,
    time_stamp: i64,
) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO reviews (author, review_text, time_stamp) VALUES (?1, ?2, ?3)",
        params![author, review_text, time_stamp],
    )?;
    Ok(())
}

pub fn get_all_reviews(conn: &Connection) -> anyhow::Result<Vec<Review>> {
    let mut stmt = conn.prepare(
        "SELECT author, review_text, time_stamp FROM reviews ORDER BY time_stamp DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Review {
            author: row.get(0)?,
            review_text: row.get(1)?,
            time_stamp: row.get(2)?,
        })
    })?;

    let mut reviews = vec![];
    for row in rows {
        reviews.push(row?);
    }
    Ok(reviews)
}

// ── User Profiles ──

pub fn get_profile(conn: &Connection, identity: &str) -> anyhow::Result<Option<UserProfile>> {
    let result = conn.query_row(
        "SELECT name, email, phone FROM user_profiles WHERE identity = ?1",
        params![identity],
        |row| {
            Ok(UserProfile {
                name: row.get(0)?,
                email: row.get(1)?,
                phone: row.get(2)?,
            })
        },
    );

    match result {
        Ok(profile) => Ok(Some(profile)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn save_profile(conn: &Connection, identity: &str, profile: &UserProfile) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO user_profiles (identity, name, email, phone)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(identity) DO UPDATE SET
           name = excluded.name,
           email = excluded.email,
           phone = excluded.phone",
        params![identity, profile.name, profile.email, profile.phone],
    )?;
    Ok(())
}

// ── Roles ──

pub fn get_role(conn: &Connection, identity: &str) -> anyhow::Result<Option<UserRole>> {
    let result = conn.query_row(
        "SELECT role FROM user_roles WHERE identity = ?1",
        params![identity],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(role_str) => Ok(UserRole::parse(&role_str)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn set_role(conn: &Connection, identity: &str, role: UserRole) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO user_roles (identity, role) VALUES (?1, ?2)
         ON CONFLICT(identity) DO UPDATE SET role = excluded.role",
        params![identity, role.as_str()],
    )?;
    Ok(())
}

// ── Payment Instructions ──

pub fn insert_payment_instruction(conn: &Connection, instruction: &str) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO payment_instructions (instruction) VALUES (?1)",
        params![instruction],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_payment_instruction(
    conn: &Connection,
    id: i64,
    instruction: &str,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE payment_instructions SET instruction = ?1 WHERE id = ?2",
        params![instruction, id],
    )?;
    Ok(count > 0)
}

pub fn delete_payment_instruction(conn: &Connection, id: i64) -> anyhow::Result<bool> {
    let count = conn.execute(
        "DELETE FROM payment_instructions WHERE id = ?1",
        params![id],
    )?;
    Ok(count > 0)
}

pub fn get_all_payment_instructions(conn: &Connection) -> anyhow::Result<Vec<(i64, String)>> {
    let mut stmt = conn.prepare("SELECT id, instruction FROM payment_instructions ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut instructions = vec![];
    for row in rows {
        instructions.push(row?);
    }
    Ok(instructions)
}
