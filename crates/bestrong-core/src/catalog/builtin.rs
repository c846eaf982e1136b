//! Built-in exercise dataset.

/// `(bucket, [(name, muscle, equipment)])` in catalog order.
pub(super) const BUILTIN_BUCKETS: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "chest",
        &[
            ("Bench Press", "chest", "barbell"),
            ("Incline Dumbbell Press", "chest", "dumbbell"),
            ("Push-ups", "chest", "bodyweight"),
            ("Chest Flyes", "chest", "dumbbell"),
            ("Dips", "chest", "bodyweight"),
        ],
    ),
    (
        "back",
        &[
            ("Pull-ups", "back", "bodyweight"),
            ("Bent-over Row", "back", "barbell"),
            ("Lat Pulldown", "back", "machine"),
            ("Deadlift", "back", "barbell"),
            ("T-Bar Row", "back", "barbell"),
        ],
    ),
    (
        "shoulders",
        &[
            ("Overhead Press", "shoulders", "barbell"),
            ("Lateral Raises", "shoulders", "dumbbell"),
            ("Rear Delt Flyes", "shoulders", "dumbbell"),
            ("Face Pulls", "shoulders", "cable"),
            ("Arnold Press", "shoulders", "dumbbell"),
        ],
    ),
    (
        "legs",
        &[
            ("Squats", "legs", "barbell"),
            ("Lunges", "legs", "bodyweight"),
            ("Leg Press", "legs", "machine"),
            ("Romanian Deadlift", "legs", "barbell"),
            ("Calf Raises", "legs", "bodyweight"),
        ],
    ),
    (
        "arms",
        &[
            ("Bicep Curls", "biceps", "dumbbell"),
            ("Tricep Dips", "triceps", "bodyweight"),
            ("Hammer Curls", "biceps", "dumbbell"),
            ("Overhead Tricep Extension", "triceps", "dumbbell"),
            ("Close-grip Bench Press", "triceps", "barbell"),
        ],
    ),
    (
        "core",
        &[
            ("Plank", "core", "bodyweight"),
            ("Russian Twists", "core", "bodyweight"),
            ("Mountain Climbers", "core", "bodyweight"),
            ("Dead Bug", "core", "bodyweight"),
            ("Bicycle Crunches", "core", "bodyweight"),
        ],
    ),
];
