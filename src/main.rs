//! Demo driver for the scheduling engine.
//!
//! Replays a morning at the front desk: a few bookings (one of them clashing),
//! a status change, then the dashboard counts, a search and the free slots.

use chrono::{Duration, Local};
use clinic_scheduler::{
    available_slots, compute_statistics, create_appointment, derive_reminder, filter_appointments, lifecycle,
    nearest_available_slot, Appointment, AppointmentFilter, AppointmentType, NewAppointment, Priority, SchedulerConfig,
    SchedulingError, StatusAction,
};
use tracing_subscriber::EnvFilter;

fn print_header() {
    println!("\n{}", "=".repeat(60));
    println!("       CLINIC APPOINTMENT BOOK");
    println!("{}", "=".repeat(60));
}

fn book(appointments: &mut Vec<Appointment>, config: &SchedulerConfig, request: NewAppointment) {
    let label = format!("{} at {} {}", request.patient_name, request.date, request.time);

    match create_appointment(appointments, &request) {
        Ok(appointment) => {
            let reminder = derive_reminder(&appointment, config.reminder_lead_minutes);
            println!("  booked   {:<38} [{}]", label, appointment.priority);
            println!("           reminder at {}", reminder.scheduled_for.format("%Y-%m-%d %H:%M"));
            appointments.push(appointment);
        }
        Err(SchedulingError::Conflict { date, time, .. }) => {
            println!("  CONFLICT {:<38}", label);
            match nearest_available_slot(appointments, date, time, &config.working_hours, config.slot_minutes) {
                Ok(Some(slot)) => println!("           nearest free slot: {}", slot),
                Ok(None) => println!("           no free slots left that day"),
                Err(e) => println!("           could not look up free slots: {}", e),
            }
        }
        Err(e) => println!("  REJECTED {:<38} {}", label, e),
    }
}

fn run_demo(config: &SchedulerConfig) -> clinic_scheduler::Result<()> {
    let tomorrow = (Local::now() + Duration::days(1)).date_naive();
    let day = tomorrow.format("%Y-%m-%d").to_string();
    let mut appointments: Vec<Appointment> = Vec::new();

    println!("\n--- Booking for {} ---", day);
    let requests = vec![
        NewAppointment::new("John Smith", &day, "10:00", config.default_duration)
            .with_reason("Annual checkup"),
        NewAppointment::new("Jane Doe", &day, "10:15", config.default_duration)
            .with_reason("Severe chest pain")
            .with_type(AppointmentType::Emergency)
            .with_priority(Priority::Urgent),
        NewAppointment::new("Bob Wilson", &day, "10:30", 45)
            .with_reason("Follow-up on test results")
            .with_type(AppointmentType::FollowUp)
            .with_priority(Priority::High),
        NewAppointment::new("", &day, "15:00", config.default_duration),
        NewAppointment::new("Alice Brown", &day, "14:00", config.default_duration)
            .with_reason("Prescription renewal")
            .with_type(AppointmentType::Consultation),
    ];
    for request in requests {
        book(&mut appointments, config, request);
    }

    if let Some(first) = appointments.first_mut() {
        let confirmed = lifecycle::apply(first, StatusAction::Confirm)?;
        *first = confirmed;
        println!("\n{} is now {}", first.patient_name, first.status);
    }

    let stats = compute_statistics(&appointments);
    println!("\n--- Statistics ---");
    println!("  Total: {}  Today: {}  This week: {}", stats.total, stats.today, stats.week);
    for (status, count) in &stats.by_status {
        println!("  {:<12} {}", status, count);
    }

    println!("\n--- Search 'john' ---");
    for apt in filter_appointments(&appointments, &AppointmentFilter::new().query("john")) {
        println!("  {} - {} ({})", apt.window(), apt.patient_name, apt.reason);
    }

    let free = available_slots(&appointments, tomorrow, &config.working_hours, config.slot_minutes)?;
    println!("\n--- Free slots ({} total) ---", free.len());
    for slot in free.iter().take(6) {
        println!("  {}", slot);
    }
    if free.len() > 6 {
        println!("  ... and {} more", free.len() - 6);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(SchedulerConfig::default_log_filter())),
        )
        .init();

    let config = match SchedulerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    print_header();
    if let Err(e) = run_demo(&config) {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
