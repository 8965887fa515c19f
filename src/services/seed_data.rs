//! Fixed seed catalogs: the 30-question assessment set and the default
//! website content. Used by the seed endpoints only.

use crate::dto::content_dto::{
    ActivityContent, ProductContent, SectionImagePayload, SlideContent, TestimonialContent,
};
use crate::models::question::QuestionOption;

pub struct SeedQuestion {
    pub text: &'static str,
    pub category: &'static str,
    pub options: Vec<QuestionOption>,
    pub sort_order: i32,
    pub is_free: bool,
}

/// Options are always four answers lettered A-D with scores 1-4.
fn q(
    order: i32,
    is_free: bool,
    category: &'static str,
    text: &'static str,
    options: [&'static str; 4],
) -> SeedQuestion {
    let options = options
        .iter()
        .enumerate()
        .map(|(i, text)| QuestionOption {
            text: (*text).to_string(),
            value: ((b'A' + i as u8) as char).to_string(),
            score: i as i32 + 1,
        })
        .collect();
    SeedQuestion {
        text,
        category,
        options,
        sort_order: order,
        is_free,
    }
}

/// The full assessment catalog: 5 free questions followed by 25 paid ones,
/// ordered 1..=30.
pub fn default_questions() -> Vec<SeedQuestion> {
    vec![
        // Free tier
        q(
            1,
            true,
            "personality",
            "Ketika menghadapi masalah, saya lebih suka:",
            [
                "Menganalisis secara logis dan sistematis",
                "Mengikuti intuisi dan perasaan",
                "Berdiskusi dengan orang lain",
                "Mencoba berbagai solusi langsung",
            ],
        ),
        q(
            2,
            true,
            "personality",
            "Dalam situasi sosial, saya cenderung:",
            [
                "Menjadi pusat perhatian dan aktif berbicara",
                "Mendengarkan dan mengamati lebih banyak",
                "Bergantung pada situasi dan suasana",
                "Memilih berinteraksi dengan kelompok kecil",
            ],
        ),
        q(
            3,
            true,
            "talent",
            "Saat bekerja dalam tim, peran yang paling cocok untuk saya adalah:",
            [
                "Pemimpin yang mengarahkan",
                "Kreator ide dan inovasi",
                "Pelaksana yang detail",
                "Mediator yang menjaga harmoni",
            ],
        ),
        q(
            4,
            true,
            "interest",
            "Kegiatan yang paling menarik bagi saya adalah:",
            [
                "Membaca dan mempelajari hal baru",
                "Berkreasi dan membuat sesuatu",
                "Berolahraga dan aktivitas fisik",
                "Bersosialisasi dan membantu orang lain",
            ],
        ),
        q(
            5,
            true,
            "personality",
            "Ketika mengambil keputusan penting, saya lebih mengandalkan:",
            [
                "Data dan fakta yang jelas",
                "Perasaan dan nilai-nilai personal",
                "Saran dari orang yang dipercaya",
                "Pengalaman masa lalu",
            ],
        ),
        // Paid tier
        q(
            6,
            false,
            "personality",
            "Bagaimana cara Anda mengelola stres?",
            [
                "Berolahraga atau aktivitas fisik",
                "Meditasi atau relaksasi",
                "Berbicara dengan orang terdekat",
                "Fokus menyelesaikan sumber stres",
            ],
        ),
        q(
            7,
            false,
            "skills",
            "Dalam berkomunikasi, saya lebih efektif dengan:",
            [
                "Tulisan yang terstruktur",
                "Presentasi visual",
                "Diskusi langsung",
                "Demonstrasi praktik",
            ],
        ),
        q(
            8,
            false,
            "interest",
            "Apa yang paling memotivasi Anda dalam bekerja?",
            [
                "Pencapaian dan pengakuan",
                "Pembelajaran dan pertumbuhan",
                "Stabilitas dan keamanan",
                "Dampak positif pada orang lain",
            ],
        ),
        q(
            9,
            false,
            "personality",
            "Bagaimana Anda menghadapi perubahan?",
            [
                "Dengan antusias dan cepat beradaptasi",
                "Dengan hati-hati setelah pertimbangan matang",
                "Dengan mencari dukungan dari orang lain",
                "Dengan fokus pada hal yang bisa dikontrol",
            ],
        ),
        q(
            10,
            false,
            "interest",
            "Lingkungan kerja ideal untuk saya adalah:",
            [
                "Dinamis dengan banyak tantangan",
                "Terstruktur dan terorganisir",
                "Kolaboratif dan suportif",
                "Fleksibel dan mandiri",
            ],
        ),
        q(
            11,
            false,
            "talent",
            "Kekuatan utama saya adalah:",
            [
                "Berpikir analitis dan kritis",
                "Kreativitas dan inovasi",
                "Empati dan komunikasi",
                "Organisasi dan eksekusi",
            ],
        ),
        q(
            12,
            false,
            "skills",
            "Ketika belajar hal baru, saya lebih suka:",
            [
                "Membaca dan meneliti sendiri",
                "Menonton video atau tutorial visual",
                "Diskusi dan belajar bersama",
                "Langsung praktik dan coba-coba",
            ],
        ),
        q(
            13,
            false,
            "interest",
            "Apa yang membuat Anda merasa paling puas?",
            [
                "Menyelesaikan proyek yang menantang",
                "Menciptakan sesuatu yang unik",
                "Membantu orang lain sukses",
                "Mencapai target yang ditetapkan",
            ],
        ),
        q(
            14,
            false,
            "personality",
            "Bagaimana Anda menangani konflik?",
            [
                "Menghadapi langsung dengan tegas",
                "Mencari kompromi yang adil",
                "Menghindari dan memberi waktu",
                "Mencari mediator atau bantuan",
            ],
        ),
        q(
            15,
            false,
            "interest",
            "Apa tujuan karir jangka panjang Anda?",
            [
                "Menjadi ahli di bidang tertentu",
                "Memimpin tim atau organisasi",
                "Memiliki bisnis sendiri",
                "Memberikan kontribusi sosial",
            ],
        ),
        q(
            16,
            false,
            "skills",
            "Keterampilan mana yang paling ingin Anda kembangkan saat ini?",
            [
                "Kemampuan analisis data",
                "Keterampilan desain dan visual",
                "Kemampuan berbicara di depan umum",
                "Keterampilan manajemen proyek",
            ],
        ),
        q(
            17,
            false,
            "personality",
            "Bagaimana Anda merencanakan kegiatan sehari-hari?",
            [
                "Membuat jadwal terperinci",
                "Menentukan prioritas utama saja",
                "Mengikuti alur tanpa rencana kaku",
                "Menyesuaikan dengan kebutuhan orang sekitar",
            ],
        ),
        q(
            18,
            false,
            "talent",
            "Dalam proyek kelompok, kontribusi terbesar saya biasanya:",
            [
                "Menyusun strategi dan pembagian tugas",
                "Memberikan ide-ide segar",
                "Memastikan detail pekerjaan rapi",
                "Menjaga semangat dan kekompakan tim",
            ],
        ),
        q(
            19,
            false,
            "interest",
            "Topik yang paling sering saya cari di internet adalah:",
            [
                "Sains dan teknologi",
                "Seni dan budaya",
                "Olahraga dan kesehatan",
                "Bisnis dan keuangan",
            ],
        ),
        q(
            20,
            false,
            "skills",
            "Saat menghadapi tugas baru yang sulit, langkah pertama saya:",
            [
                "Mencari referensi dan mempelajari teorinya",
                "Membuat sketsa atau gambaran besar",
                "Bertanya pada yang lebih berpengalaman",
                "Langsung mencoba sambil belajar",
            ],
        ),
        q(
            21,
            false,
            "personality",
            "Ketika rencana berubah mendadak, reaksi saya:",
            [
                "Segera menyusun rencana baru",
                "Merasa terganggu namun menyesuaikan",
                "Mencari tahu penyebab perubahan",
                "Melihatnya sebagai peluang baru",
            ],
        ),
        q(
            22,
            false,
            "talent",
            "Orang lain sering meminta bantuan saya untuk:",
            [
                "Memecahkan masalah yang rumit",
                "Membuat sesuatu terlihat menarik",
                "Menengahi perbedaan pendapat",
                "Mengatur acara atau kegiatan",
            ],
        ),
        q(
            23,
            false,
            "interest",
            "Jika memiliki waktu luang satu hari penuh, saya memilih:",
            [
                "Membaca buku atau menonton dokumenter",
                "Berkarya atau membuat proyek pribadi",
                "Berkumpul bersama teman dan keluarga",
                "Menjelajah tempat baru",
            ],
        ),
        q(
            24,
            false,
            "skills",
            "Dalam mengelola waktu, saya paling terbantu oleh:",
            [
                "Daftar tugas tertulis",
                "Pengingat visual dan kalender",
                "Komitmen bersama rekan",
                "Tenggat waktu yang jelas",
            ],
        ),
        q(
            25,
            false,
            "personality",
            "Saat menerima kritik, saya biasanya:",
            [
                "Menganalisis kebenaran kritik tersebut",
                "Merenungkannya secara pribadi",
                "Mendiskusikannya dengan pemberi kritik",
                "Segera memperbaiki yang bisa diperbaiki",
            ],
        ),
        q(
            26,
            false,
            "talent",
            "Bakat alami yang paling saya rasakan adalah:",
            [
                "Kepekaan terhadap angka dan logika",
                "Imajinasi dan rasa seni",
                "Kemampuan memahami perasaan orang",
                "Ketangkasan fisik dan koordinasi",
            ],
        ),
        q(
            27,
            false,
            "interest",
            "Acara yang paling ingin saya hadiri:",
            [
                "Seminar ilmiah atau teknologi",
                "Pameran seni atau pertunjukan",
                "Kegiatan sosial atau sukarelawan",
                "Kompetisi atau turnamen",
            ],
        ),
        q(
            28,
            false,
            "skills",
            "Saat mempresentasikan ide, kekuatan saya ada pada:",
            [
                "Data dan argumen yang kuat",
                "Materi visual yang menarik",
                "Interaksi dengan pendengar",
                "Contoh nyata dan demonstrasi",
            ],
        ),
        q(
            29,
            false,
            "personality",
            "Dalam mengambil risiko, saya termasuk orang yang:",
            [
                "Berhitung matang sebelum melangkah",
                "Berani selama nilainya jelas",
                "Mengikuti pertimbangan orang terpercaya",
                "Spontan ketika peluang muncul",
            ],
        ),
        q(
            30,
            false,
            "skills",
            "Untuk menjaga kualitas pekerjaan, saya mengandalkan:",
            [
                "Pemeriksaan ulang secara sistematis",
                "Standar pribadi yang tinggi",
                "Masukan dari rekan kerja",
                "Evaluasi setelah setiap tahap",
            ],
        ),
    ]
}

pub fn default_hero_slides() -> Vec<SlideContent> {
    vec![
        SlideContent {
            title: "COMPANY PROFILE".into(),
            subtitle: "NEWMECLASS".into(),
            description: "Kami, perusahaan edukasi peduli minat bakat, yang berinovasi dengan tambahan strategi membangun jejaring komunitas.".into(),
            badge: "Kelas Peduli Talenta".into(),
            image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&q=80".into(),
            cta_text: "www.newmeclass.com".into(),
            cta_link: "/".into(),
            sort_order: 0,
            is_active: true,
        },
        SlideContent {
            title: "SIAPA KAMI?".into(),
            subtitle: "PT. MITRA SEMESTA EDUCLASS".into(),
            description: "NEWMECLASS adalah sebuah brand dan produk dari PT. MITRA SEMESTA EDUCLASS, yang bergerak dengan produk Edukasi dan Komunitas.".into(),
            badge: "B to B & B to C".into(),
            image_url: "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&q=80".into(),
            cta_text: "Pelajari Lebih Lanjut".into(),
            cta_link: "/company-profile".into(),
            sort_order: 1,
            is_active: true,
        },
        SlideContent {
            title: "PRODUK USAHA".into(),
            subtitle: "NIB: 2805240064989".into(),
            description: "Berbagai produk dan layanan edukasi untuk pengembangan potensi diri dan bakat alami Anda.".into(),
            badge: "Terdaftar Resmi".into(),
            image_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80".into(),
            cta_text: "Lihat Produk".into(),
            cta_link: "/shop".into(),
            sort_order: 2,
            is_active: true,
        },
        SlideContent {
            title: "VISI & MISI".into(),
            subtitle: "NEWME CLASS".into(),
            description: "Menjadi bagian dari kemajuan bangsa lewat peran EDUKASI JATIDIRI di berbagai lembaga dan organisasi.".into(),
            badge: "PT. MITRA SEMESTA EDUCLASS".into(),
            image_url: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?w=800&q=80".into(),
            cta_text: "Lihat Visi Misi".into(),
            cta_link: "/company-profile".into(),
            sort_order: 3,
            is_active: true,
        },
    ]
}

pub fn default_products() -> Vec<ProductContent> {
    let p = |order: i32, title: &str, subtitle: &str, image_url: &str, link: &str, badge: &str| {
        ProductContent {
            title: title.into(),
            subtitle: subtitle.into(),
            image_url: image_url.into(),
            link: link.into(),
            badge: badge.into(),
            sort_order: order,
            is_active: true,
        }
    };
    vec![
        p(0, "NEWME TEST", "Tes Kepribadian 5 Element", "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=400&q=80", "/newme-test", "Popular"),
        p(1, "KELAS GALI BAKAT", "Program Pengembangan Potensi", "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=400&q=80", "/kelas-gali-bakat", "B to B"),
        p(2, "NEWME CLINIC", "Konseling Individual", "https://images.unsplash.com/photo-1573497620053-ea5300f94f21?w=400&q=80", "/services/clinic", "B to C"),
        p(3, "NEWME CLASS", "Pelatihan & Workshop", "https://images.unsplash.com/photo-1552664730-d307ca884978?w=400&q=80", "/services/class", "B to B"),
        p(4, "MERCHANDISE", "Produk Komunitas NMC", "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&q=80", "/shop", "New"),
        p(5, "Digital Apps", "Aplikasi Tes Online", "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=400&q=80", "/user-test", "Digital"),
    ]
}

pub fn default_testimonials() -> Vec<TestimonialContent> {
    let t = |order: i32, name: &str, organization: &str, role: &str, image_url: &str, text: &str| {
        TestimonialContent {
            name: name.into(),
            organization: organization.into(),
            role: role.into(),
            image_url: image_url.into(),
            text: text.into(),
            rating: 5,
            sort_order: order,
            is_active: true,
        }
    };
    vec![
        t(0, "Siti Rahma", "Yayasan Al Karim", "Kepala Sekolah", "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80", "Program event KELAS GALI BAKAT yang telah terealisir di sekolah kami, NYATA telah memberi ANTUSIAS yang tinggi dari murid-murid kami."),
        t(1, "Asmi Kamal", "Peserta Program", "Mahasiswa", "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80", "Setelah diobservasi oleh NEWMECLASS, semakin mengerti tentang 'siapa diri ini', memastikan langkah apa yang bisa saya pilih dalam pengembangan."),
        t(2, "Dr. Ahmad Fauzi", "Universitas Negeri Medan", "Dosen Psikologi", "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&q=80", "Metode 5 Element yang digunakan NEWMECLASS sangat komprehensif dan berbasis riset. Saya merekomendasikan program ini."),
        t(3, "Rina Susanti", "PT. Global Mandiri", "HR Manager", "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80", "Kami telah bermitra dengan NEWMECLASS untuk program pengembangan karyawan. Hasilnya sangat positif."),
    ]
}

pub fn default_activities() -> Vec<ActivityContent> {
    let a = |order: i32, title: &str, image_url: &str, link: &str| ActivityContent {
        title: title.into(),
        image_url: image_url.into(),
        link: link.into(),
        sort_order: order,
        is_active: true,
    };
    vec![
        a(0, "Outbound Training", "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=400&q=80", "/services/class"),
        a(1, "Coaching / Upscale Talent", "https://images.unsplash.com/photo-1552664730-d307ca884978?w=400&q=80", "/services/clinic"),
        a(2, "Edukasi Bisnis", "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=400&q=80", "/kelas-gali-bakat"),
        a(3, "Kontes Brand Ambassador", "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=400&q=80", "/shop"),
    ]
}

pub fn default_section_images() -> Vec<SectionImagePayload> {
    let s = |section_name: &str, image_url: &str, alt_text: &str| SectionImagePayload {
        section_name: section_name.into(),
        image_url: image_url.into(),
        alt_text: alt_text.into(),
    };
    vec![
        s("about-main", "https://images.unsplash.com/photo-1552664730-d307ca884978?w=600&q=80", "Team Working"),
        s("services-corporate", "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=600&q=80", "Corporate Training"),
        s("services-individual", "https://images.unsplash.com/photo-1573497620053-ea5300f94f21?w=600&q=80", "Individual Counseling"),
        s("promo-main", "https://images.unsplash.com/photo-1598162942982-5cb74331817c?w=600&q=80", "Growth Mindset"),
    ]
}
