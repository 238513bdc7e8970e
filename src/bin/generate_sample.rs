use chrono::{Duration, Local};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as i64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let supervisors = ["Ana", "bruno", "CARLA", "diego"];
    let agents = [
        "Joao Silva",
        "Rita Gomes",
        "Luis Prado",
        "Marta Nunes",
        "Pedro Reis",
        "Sofia Costa",
    ];
    let turnos = ["manha", "tarde", "noite"];

    let today = Local::now().date_naive();
    // Last ten days, plus one future day to exercise the catalog bound.
    let days: Vec<_> = (0..10)
        .map(|i| today - Duration::days(i))
        .chain(std::iter::once(today + Duration::days(3)))
        .collect();

    // ---- dados_analisados.csv ----
    let mut writer = csv::Writer::from_path("dados_analisados.csv")
        .expect("Failed to create dados_analisados.csv");
    writer
        .write_record(["SUPERVISOR", "fecha_accion", "Total", "Turno", "Campanha"])
        .expect("Failed to write header");

    let mut actions_rows = 0usize;
    for day in &days {
        for supervisor in &supervisors {
            let total = rng.range(80, 180);
            let turno = turnos[rng.range(0, 2) as usize];
            let campanha = format!("C{:02}", rng.range(1, 5));
            writer
                .write_record([
                    supervisor.to_string(),
                    day.to_string(),
                    total.to_string(),
                    turno.to_string(),
                    campanha,
                ])
                .expect("Failed to write row");
            actions_rows += 1;
        }
    }
    // One row with an unparseable date, to be dropped at load.
    writer
        .write_record(["Ana", "sem data", "999", "manha", "C01"])
        .expect("Failed to write row");
    writer.flush().expect("Failed to flush");

    // ---- HORA.csv ----
    let mut writer = csv::Writer::from_path("HORA.csv").expect("Failed to create HORA.csv");
    writer
        .write_record(["NOME", "GESTIONES", "DATA", "SUPERVISOR", "CONTATO DIRETO", "EQUIPE"])
        .expect("Failed to write header");

    let mut crm_rows = 0usize;
    for day in &days {
        for (i, agent) in agents.iter().enumerate() {
            let gestiones = rng.range(90, 170);
            let contato = rng.range(5, 40);
            let supervisor = supervisors[i % supervisors.len()];
            writer
                .write_record([
                    agent.to_string(),
                    gestiones.to_string(),
                    // Mixed date format, exercising the coercion ladder.
                    day.format("%d/%m/%Y").to_string(),
                    supervisor.to_string(),
                    contato.to_string(),
                    format!("E{}", i % 2 + 1),
                ])
                .expect("Failed to write row");
            crm_rows += 1;
        }
    }
    writer.flush().expect("Failed to flush");

    println!(
        "Wrote {actions_rows} rows to dados_analisados.csv and {crm_rows} rows to HORA.csv"
    );
}
