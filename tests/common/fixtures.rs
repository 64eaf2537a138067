//! High-entropy fixture constants for the cross-component suite.

/// Multiplication fixture: left operand.
pub const MUL_A: &str = concat!(
    "1880918412945968332318334447791823180853896675983297173546586866443291748090",
    "5307979667218207956107259412783410586652384103866249484482713046481399149707",
    "2056892547609881769002591433089093168310295728726629797135746074001948585595",
    "2483138175165669995772219873162944555329798920208515105323634702047202769811",
    "8302788"
);

/// Multiplication fixture: right operand.
pub const MUL_B: &str = concat!(
    "2207956243932536463718181102629692112379729716009854443356856056893426409977",
    "1627970285873688132318254391177571701104155510584543753060010242551783179911",
    "5572474308020183103768875589252168484205418551287319987302174409385017900348",
    "2685002468812744712868380915223194930588374249930584966352382234355913198190",
    "562652"
);

/// Multiplication fixture: modulus.
pub const MUL_M: &str = concat!(
    "1898662926275647278849639489752123399541197588020875448768724478390869972129",
    "1207111550871209917957327897809669177092500935034799007921229207297261405836",
    "5189504741455258012106389465476726122728317386544805549938913489794419798666",
    "9015997969271006505166297419136179881323476268512369021411593519991044305376",
    "0928393"
);

/// Multiplication fixture: expected product.
pub const MUL_C: &str = concat!(
    "6768961616439593786306577612520573247679878612879184168359557853575611421698",
    "4695080484934776668352031528207588100518991206576329667075450734141275016847",
    "2560170373237539595234732148809447931300185282260819747726907883402978190381",
    "0422555237619343834454373315287214236553635191146766824291837543055084423392",
    "069"
);

/// Inversion fixture: operand.
pub const INV_A: &str = concat!(
    "1279908216736355875139610681258425478766200788565806200053198682414864020760",
    "9504180296942687933255157445324044744445646499322542538445030211281515467694",
    "8863879326206367790678504242165855220329526920128277216945408651603393472455",
    "6871157728831333325225092636586983204335698781611450255497504113119411074839",
    "80850"
);

/// Inversion fixture: modulus.
pub const INV_M: &str = concat!(
    "1644916216602029093747474634526296258274093314054844079963820946762592559418",
    "3585015117016556813765058677882454879607053577425483469458194767333749435239",
    "2547433024308092932184232080066530710859486310078314159582846062555292270144",
    "9556565084723472600394033044310683677309844002964353235174659446273025269515",
    "6541161"
);

/// Inversion fixture: expected inverse.
pub const INV_R: &str = concat!(
    "1488166222019000176085917532070950610758175891668205850960179338342120054923",
    "8693618432704213451614599417493416324757571138787000268801232874677751903532",
    "7834367454465384950848669840335975647709845252300678997665564794445327704740",
    "5081036854944702360657967136163124197572706559582365599363352126884626044854",
    "3684529"
);

/// Reduction fixture: a multiple of 107.
pub const REDUCE_A: &str = concat!(
    "1861942856036593718511858615985192181514200973199650867467597373711639396039",
    "1195931160121696562444075722917773769888432730017469109442455216064375118641",
    "2587251453663198203096707433767448842730403151280602183098921909720504664067",
    "1254499193079018004004363549938414121821047278344444803674843543661498325711",
    "3553933"
);
